//! Host build-system integration.
//!
//! A host that embeds the transpile pass injects its abort capability
//! explicitly through [`BuildContext`] and drives execution through
//! [`PreBuildHooks`]. Registration and execution are separate steps:
//! registering runs nothing, and the host triggers the callbacks once,
//! immediately before its final build action. Standalone CLI runs skip this
//! module entirely and map the outcome to a process exit status instead.

use crate::cli::OutputFormatArg;
use crate::config::TranspileConfig;
use crate::{orchestrator, report};

/// Abort-capable handle into a host build system.
pub trait BuildContext {
    /// Signal unrecoverable failure to the host, stopping the overall build.
    fn abort_build(&self);
}

/// A callback the host runs before its final build action.
pub type PreBuildHook = Box<dyn Fn(&dyn BuildContext)>;

/// Ordered registry of pre-build callbacks.
#[derive(Default)]
pub struct PreBuildHooks {
    hooks: Vec<PreBuildHook>,
}

impl PreBuildHooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `hook` to run once before the host's final build action.
    /// Nothing executes at registration time.
    pub fn register_pre_build_hook(&mut self, hook: PreBuildHook) {
        self.hooks.push(hook);
    }

    /// Run all registered hooks synchronously, in registration order.
    ///
    /// Called by the host immediately before its final build action.
    pub fn run_pre_build(&self, ctx: &dyn BuildContext) {
        for hook in &self.hooks {
            hook(ctx);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

/// Register the transpile pass as a pre-build hook bound to `config`.
///
/// When the host later triggers the hook, it runs one transpile pass,
/// reports the outcome, and calls [`BuildContext::abort_build`] on any
/// failure classification. No-op and success never abort.
pub fn register_transpile_hook(
    hooks: &mut PreBuildHooks,
    config: TranspileConfig,
    format: OutputFormatArg,
    verbose: bool,
) {
    hooks.register_pre_build_hook(Box::new(move |ctx| {
        let outcome = orchestrator::run(&config);
        report::print_outcome(&outcome, format, verbose);
        if outcome.is_failure() {
            ctx.abort_build();
        }
    }));
}
