pub mod editions;
pub mod state;
pub mod tenants;

#[cfg(test)]
mod fakes;
