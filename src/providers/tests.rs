//! Tests for providers module

#[cfg(test)]
mod tests {
    use crate::common::migrations::setup_test_db;
    use crate::common::{FieldErrors, FormData};
    use super::super::services::ProvidersService;

    fn provider_form() -> FormData {
        FormData::new()
            .with("name", "Servicios Veterinarios SA")
            .with("email", "Serviciosveterinarios@gmail.com")
            .with("address", "Calle 13 n°1587")
    }

    fn single_error(field: &str, message: &str) -> FieldErrors {
        FieldErrors::from([(field.to_string(), message.to_string())])
    }

    #[tokio::test]
    async fn test_can_create_provider() {
        let service = ProvidersService::new(setup_test_db().await);

        let provider = service.save_provider(&provider_form()).await.unwrap();

        assert_eq!(provider.name, "Servicios Veterinarios SA");
        assert_eq!(provider.address, "Calle 13 n°1587");
    }

    #[tokio::test]
    async fn test_cant_create_provider_without_name() {
        let service = ProvidersService::new(setup_test_db().await);

        let error = service
            .save_provider(&provider_form().with("name", ""))
            .await
            .unwrap_err();

        assert_eq!(
            error.field_errors(),
            Some(&single_error("name", "Por favor ingrese un nombre"))
        );
    }

    #[tokio::test]
    async fn test_cant_create_provider_with_invalid_email() {
        let service = ProvidersService::new(setup_test_db().await);

        let error = service
            .save_provider(&provider_form().with("email", "Serviciosveterinariosgmail.com"))
            .await
            .unwrap_err();

        assert_eq!(
            error.field_errors(),
            Some(&single_error("email", "Por favor ingrese un email valido"))
        );
    }

    #[tokio::test]
    async fn test_cant_create_provider_without_address() {
        let service = ProvidersService::new(setup_test_db().await);

        let error = service
            .save_provider(&provider_form().with("address", ""))
            .await
            .unwrap_err();

        assert_eq!(
            error.field_errors(),
            Some(&single_error("address", "Por favor ingrese una dirección"))
        );
        assert!(service.get_all_providers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_provider() {
        let service = ProvidersService::new(setup_test_db().await);
        let provider = service.save_provider(&provider_form()).await.unwrap();

        let updated = service
            .update_provider(
                provider.id,
                &FormData::new()
                    .with("address", "")
                    .with("email", "ventas@serviciosvet.com"),
            )
            .await
            .unwrap();

        assert_eq!(updated.address, "Calle 13 n°1587");
        assert_eq!(updated.email, "ventas@serviciosvet.com");
    }
}
