//! Staff Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::staff::StaffServiceError;

pub(crate) fn into_status_error(error: StaffServiceError) -> StatusError {
    match error {
        StaffServiceError::AlreadyExists => {
            StatusError::conflict().brief("A staff user with this email already exists")
        }
        StaffServiceError::InvalidReference
        | StaffServiceError::MissingRequiredData
        | StaffServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid staff user payload")
        }
        StaffServiceError::NotFound => StatusError::not_found().brief("Staff user not found"),
        StaffServiceError::AdminPrivilegesImmutable => StatusError::unprocessable_entity()
            .brief("Admin accounts hold every privilege; their flags cannot be changed"),
        StaffServiceError::CannotModifySelf => {
            StatusError::forbidden().brief("You cannot deactivate or delete your own account")
        }
        StaffServiceError::Sql(source) => {
            error!("staff storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn admin_privileges_are_unprocessable() {
        assert_eq!(
            into_status_error(StaffServiceError::AdminPrivilegesImmutable).code,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn self_modification_is_forbidden() {
        assert_eq!(
            into_status_error(StaffServiceError::CannotModifySelf).code,
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn validation_failures_are_bad_requests() {
        for error in [
            StaffServiceError::InvalidReference,
            StaffServiceError::MissingRequiredData,
            StaffServiceError::InvalidData,
        ] {
            assert_eq!(into_status_error(error).code, StatusCode::BAD_REQUEST);
        }
    }
}
