//! Device registration flow.

use tracing::{info, instrument};

use crate::Result;
use crate::credentials::Credentials;
use crate::error::InvalidInputError;
use crate::model::{DeviceInfo, Profile, UserData, UserRole};
use crate::scan::RegistrationCode;
use crate::traits::{CredentialStore, Repository};

/// Register this device with a scanned code and persist the resulting user.
///
/// The generated device password becomes the login secret, the user's
/// email the identifier.
///
/// # Errors
///
/// Fails with [`InvalidInputError::AlreadyRegistered`] when the store already
/// holds credentials; otherwise with whatever the repository or store report.
#[instrument(skip(repository, store, code), fields(user_id = code.user_id))]
pub async fn register_device<R, S>(
    repository: &R,
    store: &S,
    code: &RegistrationCode,
    device: &DeviceInfo,
) -> Result<UserData>
where
    R: Repository + ?Sized,
    S: CredentialStore + ?Sized,
{
    if store.is_registered()? {
        return Err(InvalidInputError::AlreadyRegistered.into());
    }

    let request = code.device_request(device);
    let response = repository.register_device(&request).await?;

    let user = UserData {
        credentials: Credentials::new(response.user_email, request.password),
        profile: Profile {
            display_name: response.user_name,
            role: UserRole::from_value(&response.user_role),
        },
    };
    store.save_user(&user)?;

    info!(device_id = %response.device_id, "Device registered");
    Ok(user)
}
