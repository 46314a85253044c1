mod push_plan_tests;
mod resolver_tests;
