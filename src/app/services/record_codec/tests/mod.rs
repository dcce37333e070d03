//! Tests for the record codec components

pub mod field_codec_tests;
