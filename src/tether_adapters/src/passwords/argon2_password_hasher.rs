use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use tether_core::{Password, PasswordHash, PasswordHasher, PasswordHasherError};

/// Argon2id hashing in PHC string format, run on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

fn argon2() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash_password(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let password = password.as_ref().clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                argon2()?
                    .hash_password(password.expose_secret().as_bytes(), &salt)
                    .map(|h| Secret::new(h.to_string()))
                    .map_err(|e| e.to_string())
            })
        })
        .await
        .map_err(|e| PasswordHasherError::Hashing(e.to_string()))?;

        let hash = result.map_err(PasswordHasherError::Hashing)?;
        PasswordHash::try_from(hash).map_err(|e| PasswordHasherError::Hashing(e.to_string()))
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify_password(
        &self,
        stored_hash: &PasswordHash,
        candidate: &Password,
    ) -> Result<bool, PasswordHasherError> {
        let expected_password_hash = stored_hash.as_ref().clone();
        let password_candidate = candidate.as_ref().clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_password_hash =
                    password_hash::PasswordHash::new(expected_password_hash.expose_secret())
                        .map_err(|e| PasswordHasherError::MalformedHash(e.to_string()))?;

                match argon2()
                    .map_err(PasswordHasherError::Hashing)?
                    .verify_password(
                        password_candidate.expose_secret().as_bytes(),
                        &expected_password_hash,
                    ) {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHasherError::MalformedHash(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHasherError::Hashing(e.to_string()))?
    }
}
