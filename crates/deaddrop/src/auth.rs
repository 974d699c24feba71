//! The admission authorization boundary.
//!
//! Only the administrator may admit participants. The registry core takes
//! that as an already-checked precondition, so the check has to live
//! somewhere explicit: here. A [`SignedAdmission`] is the administrator's
//! Ed25519 signature over a domain-separated encoding of the candidate
//! identity, and [`AdminAuthority::verify`] is the gate a caller passes
//! through before invoking `admit_participant`.
//!
//! Keeping this boundary separate also closes the payload-reset hole:
//! an admission-shaped log entry for an already-deposited key would
//! shadow the deposit under last-match-wins, but such an entry can only
//! come from the admission path, which rejects registered keys and
//! requires the administrator's signature.

use std::fmt;

use deaddrop_core::{Keypair, ParticipantId, Signature};
use thiserror::Error;

/// Domain prefix for admission signatures.
pub const ADMISSION_SIGN_DOMAIN: &[u8] = b"deaddrop/admission/v0:";

/// Errors from admission verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The signature does not verify against the administrator's key.
    #[error("admission is not signed by the registry administrator")]
    BadSignature,
}

/// The message the administrator signs to vouch for a candidate.
fn admission_message(candidate: &ParticipantId) -> Vec<u8> {
    let mut message = Vec::with_capacity(ADMISSION_SIGN_DOMAIN.len() + 32);
    message.extend_from_slice(ADMISSION_SIGN_DOMAIN);
    message.extend_from_slice(candidate.as_bytes());
    message
}

/// A candidate identity vouched for by the administrator.
#[derive(Clone, Copy)]
pub struct SignedAdmission {
    /// The identity to admit.
    pub candidate: ParticipantId,

    /// The administrator's signature over the admission message.
    pub signature: Signature,
}

impl SignedAdmission {
    /// Sign an admission for `candidate` with the given keypair.
    pub fn sign(admin: &Keypair, candidate: ParticipantId) -> Self {
        let signature = admin.sign(&admission_message(&candidate));
        Self {
            candidate,
            signature,
        }
    }
}

impl fmt::Debug for SignedAdmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignedAdmission({:?})", self.candidate)
    }
}

/// Verifies admissions against the administrator's identity.
#[derive(Debug, Clone, Copy)]
pub struct AdminAuthority {
    admin: ParticipantId,
}

impl AdminAuthority {
    /// Create an authority for the given administrator.
    pub const fn new(admin: ParticipantId) -> Self {
        Self { admin }
    }

    /// The administrator's identity.
    pub const fn admin(&self) -> &ParticipantId {
        &self.admin
    }

    /// Verify an admission, returning the vouched-for candidate.
    pub fn verify(&self, admission: &SignedAdmission) -> Result<ParticipantId, AuthError> {
        self.admin
            .verify(
                &admission_message(&admission.candidate),
                &admission.signature,
            )
            .map_err(|_| AuthError::BadSignature)?;
        Ok(admission.candidate)
    }
}
