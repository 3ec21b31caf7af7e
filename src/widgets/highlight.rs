use egui::{text::LayoutJob, Color32, FontId, TextFormat};

/// Lays out `text` with every case-insensitive occurrence of `filter`
/// painted on a yellow background.
pub fn line_filter_highlight_layout(text: &str, filter: &str) -> LayoutJob {
    let mut job = LayoutJob::default();
    let plain = TextFormat {
        font_id: FontId::monospace(12.0),
        ..Default::default()
    };

    if filter.is_empty() {
        job.append(text, 0.0, plain);
        return job;
    }

    let highlighted = TextFormat {
        background: Color32::YELLOW,
        color: Color32::BLACK,
        ..plain.clone()
    };

    // lowercasing may change byte lengths for non-ascii text
    let lowered = text.to_lowercase();
    if lowered.len() != text.len() {
        job.append(text, 0.0, plain);
        return job;
    }

    let needle = filter.to_lowercase();
    let mut rest = 0;
    while let Some(offset) = lowered[rest..].find(needle.as_str()) {
        let start = rest + offset;
        let end = start + needle.len();

        if start > rest {
            job.append(&text[rest..start], 0.0, plain.clone());
        }
        job.append(&text[start..end], 0.0, highlighted.clone());
        rest = end;
    }
    if rest < text.len() {
        job.append(&text[rest..], 0.0, plain);
    }

    job
}
