use std::borrow::Cow;

use anyhow::Context;
use stance_config::StanceConfig;
use stance_rules::RuleSet;

/// Configuration and the rule set every command runs against.
#[derive(Debug)]
pub struct AppContext {
    pub config: StanceConfig,
    pub rules: Cow<'static, RuleSet>,
}

impl AppContext {
    /// Resolve the rule document named by `rules.path`, or the bundled one.
    pub fn init(config: StanceConfig) -> anyhow::Result<Self> {
        let rules = match config.rules.document_path() {
            Some(path) => {
                let loaded = RuleSet::load(&path)
                    .with_context(|| format!("failed to load rules from {}", path.display()))?;
                tracing::debug!(path = %path.display(), version = loaded.version, "using custom rules");
                Cow::Owned(loaded)
            }
            None => Cow::Borrowed(RuleSet::builtin()),
        };

        Ok(Self { config, rules })
    }
}
