pub mod character;
pub mod extract;
pub mod favorite;
pub mod planet;
pub mod user;

#[cfg(test)]
mod test;
