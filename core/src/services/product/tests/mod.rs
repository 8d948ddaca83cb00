//! Tests for product service

mod service_tests;
