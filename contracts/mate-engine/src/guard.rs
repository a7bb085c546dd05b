use soroban_sdk::{log, Env};

use crate::errors::EngineError;
use crate::storage::{bump_instance_ttl, DataKey};

/// Non-reentrant lock over the engine's mutating entry points.
///
/// The flag lives in instance storage for the duration of one invocation and
/// is cleared when the guard drops. If the invocation fails the host rolls
/// the flag back together with every other write.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, EngineError> {
        let instance = env.storage().instance();
        if instance.get::<_, bool>(&DataKey::Locked).unwrap_or(false) {
            log!(env, "reentrant call rejected");
            return Err(EngineError::ReentrantCall);
        }
        instance.set(&DataKey::Locked, &true);
        bump_instance_ttl(env);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&DataKey::Locked);
    }
}
