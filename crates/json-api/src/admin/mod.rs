//! Back-office access control

pub(crate) mod middleware;

use sha2::{Digest, Sha256};

/// Optional shared bearer token protecting back-office routes.
#[derive(Debug, Clone, Default)]
pub(crate) struct AdminGuard {
    token_digest: Option<[u8; 32]>,
}

impl AdminGuard {
    #[must_use]
    pub(crate) fn new(token: Option<&str>) -> Self {
        Self {
            token_digest: token
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(digest),
        }
    }

    #[must_use]
    pub(crate) fn is_enabled(&self) -> bool {
        self.token_digest.is_some()
    }

    /// Whether `presented` grants access. Always true while no token is configured.
    #[must_use]
    pub(crate) fn permits(&self, presented: Option<&str>) -> bool {
        let Some(expected) = self.token_digest else {
            return true;
        };

        let Some(presented) = presented else {
            return false;
        };

        // Fixed-length digests compared without early exit.
        digest(presented)
            .iter()
            .zip(expected.iter())
            .fold(0_u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

fn digest(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}
