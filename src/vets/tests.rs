//! Tests for vets module

#[cfg(test)]
mod tests {
    use crate::common::migrations::setup_test_db;
    use crate::common::{FormData, Validator};
    use super::super::services::VetsService;
    use super::super::validators::VetValidator;

    fn vet_form() -> FormData {
        FormData::new()
            .with("name", "María Fernández")
            .with("email", "maria@clinica.com")
            .with("phone", "2214567890")
    }

    #[test]
    fn test_vet_validation() {
        assert!(VetValidator.validate(&vet_form()).is_valid);

        let errors = VetValidator
            .validate(&vet_form().with("email", "maria.clinica.com").with("phone", "22-14"))
            .field_errors();
        assert_eq!(errors["email"], "Por favor ingrese un email valido");
        assert_eq!(errors["phone"], "El teléfono debe ser un número");
    }

    #[tokio::test]
    async fn test_save_and_update_vet() {
        let service = VetsService::new(setup_test_db().await);
        let vet = service.save_vet(&vet_form()).await.unwrap();
        assert_eq!(vet.name, "María Fernández");

        let updated = service
            .update_vet(vet.id, &FormData::new().with("email", "").with("phone", "2219998888"))
            .await
            .unwrap();
        assert_eq!(updated.email, "maria@clinica.com");
        assert_eq!(updated.phone, "2219998888");
    }

    #[tokio::test]
    async fn test_rejected_vet_is_not_stored() {
        let service = VetsService::new(setup_test_db().await);

        let error = service
            .save_vet(&vet_form().with("name", ""))
            .await
            .unwrap_err();

        assert_eq!(error.field_errors().unwrap()["name"], "Por favor ingrese un nombre");
        assert!(service.get_all_vets().await.unwrap().is_empty());
    }
}
