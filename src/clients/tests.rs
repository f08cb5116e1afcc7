//! Tests for clients module
//!
//! These tests verify:
//! - Client form validation (name, phone, email)
//! - Saving and reading back clients
//! - Merge semantics of client updates

#[cfg(test)]
mod tests {
    use crate::common::migrations::setup_test_db;
    use crate::common::{FormData, Validator};
    use super::super::services::ClientsService;
    use super::super::validators::ClientValidator;

    fn veron_form() -> FormData {
        FormData::new()
            .with("name", "Juan Sebastian Veron")
            .with("phone", "54221555232")
            .with("address", "13 y 44")
            .with("email", "brujita75@vetsoft.com")
    }

    #[test]
    fn test_valid_client_passes_validation() {
        let result = ClientValidator.validate(&veron_form());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_validation_accumulates_errors() {
        let form = FormData::new()
            .with("name", "pepito12")
            .with("phone", "54221555232")
            .with("address", "13 y 44")
            .with("email", "brujita75@hotmail.com");

        let errors = ClientValidator.validate(&form).field_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["name"], "El nombre solo puede contener letras y espacios");
        assert_eq!(errors["email"], "El email debe ser de dominio vetsoft.com");
    }

    #[test]
    fn test_address_is_optional() {
        let form = veron_form().with("address", "");
        assert!(ClientValidator.validate(&form).is_valid);
    }

    #[tokio::test]
    async fn test_can_create_and_get_client() {
        let service = ClientsService::new(setup_test_db().await);

        service.save_client(&veron_form()).await.unwrap();

        let clients = service.get_all_clients().await.unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name, "Juan Sebastian Veron");
        assert_eq!(clients[0].phone, "54221555232");
        assert_eq!(clients[0].address, "13 y 44");
        assert_eq!(clients[0].email, "brujita75@vetsoft.com");
    }

    #[tokio::test]
    async fn test_cant_create_client_with_invalid_name() {
        let service = ClientsService::new(setup_test_db().await);

        let error = service
            .save_client(&veron_form().with("name", "pepito12"))
            .await
            .unwrap_err();

        let errors = error.field_errors().expect("validation error");
        assert_eq!(errors["name"], "El nombre solo puede contener letras y espacios");
        assert!(service.get_all_clients().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_phone_must_start_with_54() {
        let service = ClientsService::new(setup_test_db().await);

        let error = service
            .save_client(&veron_form().with("phone", "221555233"))
            .await
            .unwrap_err();

        assert_eq!(
            error.field_errors().unwrap()["phone"],
            "El teléfono debe comenzar con 54"
        );
    }

    #[tokio::test]
    async fn test_phone_must_be_only_numbers() {
        let service = ClientsService::new(setup_test_db().await);

        let error = service
            .save_client(&veron_form().with("phone", "54aaa"))
            .await
            .unwrap_err();

        assert_eq!(
            error.field_errors().unwrap()["phone"],
            "El teléfono debe ser un número"
        );
    }

    #[tokio::test]
    async fn test_email_must_have_vetsoft_domain() {
        let service = ClientsService::new(setup_test_db().await);

        let error = service
            .save_client(&veron_form().with("email", "brujita75@yahoo.com"))
            .await
            .unwrap_err();

        assert_eq!(
            error.field_errors().unwrap()["email"],
            "El email debe ser de dominio vetsoft.com"
        );
    }

    #[tokio::test]
    async fn test_can_update_client() {
        let service = ClientsService::new(setup_test_db().await);
        let client = service.save_client(&veron_form()).await.unwrap();

        let updated = service
            .update_client(client.id, &FormData::new().with("phone", "54221555999"))
            .await
            .unwrap();

        assert_eq!(updated.phone, "54221555999");
        assert_eq!(updated.name, "Juan Sebastian Veron");
    }

    #[tokio::test]
    async fn test_update_with_blank_keeps_previous_value() {
        let service = ClientsService::new(setup_test_db().await);
        let client = service.save_client(&veron_form()).await.unwrap();

        let updated = service
            .update_client(client.id, &FormData::new().with("phone", ""))
            .await
            .unwrap();

        assert_eq!(updated.phone, "54221555232");
        let stored = service.get_client_by_id(client.id).await.unwrap();
        assert_eq!(stored, client);
    }

    #[tokio::test]
    async fn test_update_with_invalid_value_is_rejected() {
        let service = ClientsService::new(setup_test_db().await);
        let client = service.save_client(&veron_form()).await.unwrap();

        let error = service
            .update_client(
                client.id,
                &FormData::new()
                    .with("phone", "221555233")
                    .with("address", "7 y 50"),
            )
            .await
            .unwrap_err();

        let errors = error.field_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["phone"], "El teléfono debe comenzar con 54");
        let stored = service.get_client_by_id(client.id).await.unwrap();
        assert_eq!(stored.address, "13 y 44");
    }

    #[tokio::test]
    async fn test_update_missing_client() {
        let service = ClientsService::new(setup_test_db().await);

        let error = service
            .update_client(99, &FormData::new().with("name", "Ana"))
            .await
            .unwrap_err();

        assert!(matches!(error, crate::common::ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_client() {
        let service = ClientsService::new(setup_test_db().await);
        let client = service.save_client(&veron_form()).await.unwrap();

        service.delete_client(client.id).await.unwrap();

        assert!(service.get_client_by_id(client.id).await.is_err());
        assert!(service.delete_client(client.id).await.is_err());
    }
}
