//! Integration tests for format sniffing.

mod properties;
