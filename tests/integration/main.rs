//! Integration tests for Robots-Checker
//!
//! These tests use wiremock to stand in for the analysis service and drive
//! full submissions through the real HTTP transport.

mod submit_tests;
