//! Integration tests driving the full router.


mod identity_test;
mod status_test;
