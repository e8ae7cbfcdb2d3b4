//! JSON operation reports.
//!
//! Every report is a flat JSON object carrying `status` ("success" or
//! "error") and `operation`, plus the operation-specific fields and the
//! encoder's statistics merged in. Binary payloads are base64-encoded.
//! Failures never produce partial reports: the error form carries only
//! `status`, `operation`, and `message`.
//!
//! ## Example
//!
//! ```rust
//! use ccsds_fec::report::convolutional_encode_report;
//!
//! let json = convolutional_encode_report("10110", "CCSDS_k7_r12");
//! let value: serde_json::Value = serde_json::from_str(&json).unwrap();
//! assert_eq!(value["status"], "success");
//! assert_eq!(value["output_length"], 22);
//! ```

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;
use serde_json::{json, Value};

use crate::comparison::{run_comparison, ComparisonConfig};
use crate::concatenated::ConcatenatedEncoder;
use crate::convolutional::ConvolutionalEncoder;
use crate::error::FecError;
use crate::parse::{format_bits, parse_bits, parse_generators};
use crate::reed_solomon::RsBlockCodec;
use crate::repetition::{LdpcEncoder, TurboEncoder};

fn render(operation: &str, result: Result<Value, FecError>) -> String {
    let value = match result {
        Ok(mut obj) => {
            obj["status"] = json!("success");
            obj["operation"] = json!(operation);
            obj
        }
        Err(e) => json!({
            "status": "error",
            "operation": operation,
            "message": e.to_string(),
        }),
    };
    serde_json::to_string_pretty(&value).expect("JSON value serialization cannot fail")
}

/// Merge an encoder's stats struct into the report object.
fn merge(mut base: Value, stats: &impl Serialize) -> Value {
    if let Ok(Value::Object(fields)) = serde_json::to_value(stats) {
        if let Value::Object(obj) = &mut base {
            for (key, val) in fields {
                obj.insert(key, val);
            }
        }
    }
    base
}

/// Encode a textual bit vector with a registry convolutional standard.
pub fn convolutional_encode_report(input_bits: &str, standard: &str) -> String {
    render("CCSDS Convolutional Encoding", (|| {
        let bits = parse_bits(input_bits)?;
        let encoder = ConvolutionalEncoder::new(standard)?;
        let (encoded, stats) = encoder.encode(&bits);
        Ok(merge(
            json!({
                "standard": standard,
                "description": encoder.description(),
                "input_bits": format_bits(&bits),
                "encoded_bits": format_bits(&encoded),
            }),
            &stats,
        ))
    })())
}

/// Encode a textual bit vector with an explicit octal generator set
/// (e.g. `"171,133"`); the generator count fixes the code rate 1/r.
pub fn convolution_encode_report(input_bits: &str, generator_polynomials: &str) -> String {
    render("Convolution Encoding", (|| {
        let bits = parse_bits(input_bits)?;
        let generators = parse_generators(generator_polynomials)?;
        let encoder = ConvolutionalEncoder::with_generators(&generators)?;
        let (encoded, stats) = encoder.encode(&bits);
        Ok(merge(
            json!({
                "generator_polynomial": generator_polynomials,
                "input_bits": format_bits(&bits),
                "encoded_bits": format_bits(&encoded),
            }),
            &stats,
        ))
    })())
}

/// Encode text with a registry Reed-Solomon standard.
pub fn reed_solomon_encode_report(data: &str, standard: &str) -> String {
    render("CCSDS Reed-Solomon Encoding", (|| {
        let codec = RsBlockCodec::new(standard)?;
        let (encoded, stats) = codec.encode(data.as_bytes())?;
        Ok(merge(
            json!({
                "standard": standard,
                "description": codec.standard().description,
                "original_data": data,
                "encoded_data_base64": BASE64.encode(&encoded),
            }),
            &stats,
        ))
    })())
}

/// Decode a base64 Reed-Solomon codeword, correcting errors where possible.
pub fn reed_solomon_decode_report(encoded_data_b64: &str, standard: &str) -> String {
    render("CCSDS Reed-Solomon Decoding", (|| {
        let codec = RsBlockCodec::new(standard)?;
        let encoded = BASE64
            .decode(encoded_data_b64)
            .map_err(|e| FecError::Parse(format!("invalid base64 input: {}", e)))?;
        let (decoded, stats) = codec.decode(&encoded)?;
        Ok(merge(
            json!({
                "standard": standard,
                "decoded_data": String::from_utf8_lossy(&decoded),
            }),
            &stats,
        ))
    })())
}

/// Encode text with the concatenated RS (inner) + convolutional (outer)
/// pipeline.
pub fn concatenated_encode_report(data: &str, conv_standard: &str, rs_standard: &str) -> String {
    render("CCSDS Concatenated Code Encoding", (|| {
        let encoder = ConcatenatedEncoder::new(conv_standard, rs_standard)?;
        let (encoded, stats) = encoder.encode(data.as_bytes())?;
        Ok(merge(
            json!({
                "outer_code": conv_standard,
                "inner_code": rs_standard,
                "original_data": data,
                "encoded_data_base64": BASE64.encode(&encoded),
            }),
            &stats,
        ))
    })())
}

/// Encode text with the turbo repetition placeholder.
pub fn turbo_encode_report(data: &str, frame_size: usize) -> String {
    render("CCSDS Turbo Code Encoding", {
        let (encoded, stats) = TurboEncoder::new(frame_size).encode(data.as_bytes());
        Ok(merge(
            json!({
                "original_data": data,
                "encoded_data_base64": BASE64.encode(&encoded),
            }),
            &stats,
        ))
    })
}

/// Encode text with the LDPC repetition placeholder.
pub fn ldpc_encode_report(data: &str, code_rate: &str) -> String {
    render("CCSDS LDPC Code Encoding", (|| {
        let encoder = LdpcEncoder::new(code_rate)?;
        let (encoded, stats) = encoder.encode(data.as_bytes());
        Ok(merge(
            json!({
                "original_data": data,
                "encoded_data_base64": BASE64.encode(&encoded),
            }),
            &stats,
        ))
    })())
}

/// Compare every default-configured FEC method over the same text input.
pub fn comparison_report(test_data: &str) -> String {
    render("CCSDS FEC Comparison", {
        let report = run_comparison(test_data.as_bytes(), &ComparisonConfig::default());
        Ok(merge(json!({ "test_data": test_data }), &report))
    })
}
