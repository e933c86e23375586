use crate::valuation_matrix::ValuationMatrix;

/// Default wrapping width for rendered matrices
pub const DEFAULT_MAX_LINE_WIDTH: usize = 100;

/// Options for rendering a valuation matrix as text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub max_line_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_line_width: DEFAULT_MAX_LINE_WIDTH,
        }
    }
}

impl RenderOptions {
    pub fn with_max_line_width(mut self, max_line_width: usize) -> Self {
        self.max_line_width = max_line_width;
        self
    }
}

/// Render rows as `[[a b]\n [c d]]`, elements right-aligned to a common width.
///
/// When every value is integral they print without a fractional part, otherwise
/// integral values get a trailing `.` (`1.` next to `0.5`).
pub(crate) fn render(matrix: &ValuationMatrix, options: &RenderOptions) -> String {
    if matrix.num_of_agents() == 0 {
        return "[]".to_string();
    }

    let rows = matrix.to_rows();
    let integral = rows.iter().flatten().all(|v| v.is_finite() && v.fract() == 0.0);
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|&v| format_value(v, integral)).collect())
        .collect();
    let width = cells.iter().flatten().map(String::len).max().unwrap_or(0);

    let last_row = cells.len() - 1;
    let mut lines = Vec::new();
    for (r, row) in cells.iter().enumerate() {
        let mut line = String::from(if r == 0 { "[[" } else { " [" });
        // Closing brackets that must fit after the last element of the row
        let closing = if r == last_row { "]]" } else { "]" };

        let mut on_line = 0;
        for (c, cell) in row.iter().enumerate() {
            let token = format!("{cell:>width$}");
            let reserve = if c + 1 == row.len() { closing.len() } else { 0 };
            let separator = usize::from(on_line > 0);

            if on_line > 0 && line.len() + separator + token.len() + reserve > options.max_line_width
            {
                lines.push(line);
                line = String::from("  ");
                on_line = 0;
            }
            if on_line > 0 {
                line.push(' ');
            }
            line.push_str(&token);
            on_line += 1;
        }

        line.push_str(closing);
        lines.push(line);
    }

    lines.join("\n")
}

fn format_value(value: f64, integral: bool) -> String {
    if integral {
        return format!("{value:.0}");
    }
    let text = value.to_string();
    if value.is_finite() && !text.contains(['.', 'e']) {
        format!("{text}.")
    } else {
        text
    }
}
