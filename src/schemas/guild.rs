//! Guild schemas
//!
//! Guilds are keyed by their Discord snowflake; the interesting validation
//! here is path-parameter extraction, not bodies.

use std::sync::OnceLock;

use crate::core::validate::ConstraintSet;
use crate::registry::{default_registry, required};

pub struct Guild;

impl Guild {
    /// Path parameters of every `/guilds/{guild_id}/...` route
    pub fn params() -> &'static ConstraintSet {
        static SET: OnceLock<ConstraintSet> = OnceLock::new();
        SET.get_or_init(|| {
            default_registry()
                .set()
                .field("guild_id", required())
                .build()
                .expect("guild params schema")
        })
    }
}
