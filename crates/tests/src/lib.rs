
#[cfg(test)]
mod event_tests;
#[cfg(test)]
mod user_tests;
