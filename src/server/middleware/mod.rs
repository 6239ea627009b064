pub mod auth;
pub mod extract;
pub mod session;

#[cfg(test)]
mod test;
