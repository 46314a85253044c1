//! The `@push` resource resolver and the push plan built from its output.
//!
//! Spreads annotated with `@push(module: "...")` name auxiliary modules
//! that should be delivered alongside a response. [`PushResolver`] walks a
//! document and collects them in order; [`PushPlan`] deduplicates them and
//! maps each one to a root-relative push path.

mod push_plan;
mod resolver;

pub use push_plan::normalize_push_path;
pub use push_plan::PushPlan;
pub use push_plan::PushPlanEntry;
pub use resolver::PushResolver;
pub use resolver::PushResource;
pub use resolver::MODULE_ARGUMENT_NAME;
pub use resolver::PUSH_DIRECTIVE_NAME;

#[cfg(test)]
mod tests;
