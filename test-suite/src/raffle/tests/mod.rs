mod entering;
mod integration_tests;
