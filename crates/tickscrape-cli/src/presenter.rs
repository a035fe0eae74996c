//! Pure projection of lifecycle state to user-visible text.

use tickscrape_core::{JobResult, LifecycleState};

/// Render the current lifecycle state for display. Stateless; the
/// controller's state is the only input.
pub fn render(state: &LifecycleState) -> String {
    match state {
        LifecycleState::Idle => String::from("No job submitted yet."),
        LifecycleState::Submitting(request) => format!(
            "Scraping {} symbol(s), please wait...",
            request.symbols.len()
        ),
        LifecycleState::Failed(error) => format!("Error: {error}"),
        LifecycleState::Succeeded(result) => render_result(result),
    }
}

fn render_result(result: &JobResult) -> String {
    [
        String::from("Stock data is ready for download."),
        format!("  Symbols:     {}", result.stock_symbols.join(", ")),
        format!("  Date range:  {} to {}", result.start_date, result.end_date),
        format!("  Format:      {}", result.output_format.to_uppercase()),
        format!("  Expires in:  {}", result.expiration),
        format!("  Download:    {}", result.download_url),
        format!("  S3 location: {}", result.s3_uri),
    ]
    .join("\n")
}
