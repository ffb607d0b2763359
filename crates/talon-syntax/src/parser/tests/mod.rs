mod grammar_tests;
mod recovery_tests;
