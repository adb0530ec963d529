use crate::error::Error;
use crate::model::LivenessResult;

/// Decode the response body into a [`LivenessResult`].
///
/// Decode failures are not fatal: a warning is logged and an all-default
/// result is returned so the report still renders a best-effort verdict.
pub fn decode_result(body: &[u8]) -> LivenessResult {
    match serde_json::from_slice(body) {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!("can not decode response JSON: {err}");
            LivenessResult::default()
        }
    }
}

/// Render the detailed report: the indented response structure, the
/// one-line verdict, and per-sample error blocks in original order.
pub fn render_detailed(result: &LivenessResult) -> String {
    let pretty =
        serde_json::to_string_pretty(result).expect("LivenessResult should serialize");

    let mut lines = vec![format!("Detailed response body:\n{pretty}")];
    lines.push(if result.success {
        "Result:\nImages are recorded from a live person.".to_string()
    } else {
        "Result:\nImages are NOT recorded from a live person.".to_string()
    });

    for (i, sample) in result.samples.iter().enumerate() {
        if sample.errors.is_empty() {
            continue;
        }
        lines.push(format!("Errors found for image{}:", i + 1));
        for entry in &sample.errors {
            lines.push(format!(
                "{} - {} - {}",
                entry.code, entry.message, entry.details
            ));
        }
    }

    lines.join("\n")
}

/// Interpret the transport outcome.  Any status other than 200 is fatal
/// and surfaces the code verbatim.  On 200 the body is either passed
/// through as-is or decoded into the detailed report.
pub fn process_response(status: u16, body: &[u8], detailed: bool) -> Result<String, Error> {
    if status != 200 {
        return Err(Error::UnexpectedStatus(status));
    }
    if !detailed {
        return Ok(String::from_utf8_lossy(body).into_owned());
    }
    Ok(render_detailed(&decode_result(body)))
}
