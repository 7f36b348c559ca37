pub mod ai;
pub mod ailments;
pub mod calculators;
pub mod engine;
pub mod state;
pub mod type_chart;

#[cfg(test)]
mod tests;
