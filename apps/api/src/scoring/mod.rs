// Readiness scoring, learning recommendations and role similarity ranking.
// Everything except the handlers is synchronous and side-effect free.

pub mod evaluation;
pub mod export;
pub mod handlers;
pub mod readiness;
pub mod recommender;
pub mod similarity;
