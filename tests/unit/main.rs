//! Unit test modules.

mod goal_metric_test;
