pub mod facade;
pub mod state;

#[cfg(test)]
mod fakes;
