mod from_tests;
mod properties_tests;
