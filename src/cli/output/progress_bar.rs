use crate::utils::percentage::Percentage;

const OPEN: char = '[';
const CLOSE: char = ']';
const FILLED: char = '#';
const EMPTY: char = '.';

/// Renders `percentage` as `[###.....]`, exactly `total_length` characters wide when
/// `total_length >= 2`. Brackets take one character each out of the width.
pub fn render_bar(percentage: Percentage, total_length: usize) -> String {
    let inner = total_length.saturating_sub(2);
    let filled = percentage.filled_cells(inner);

    let mut bar = String::with_capacity(inner + 2);
    bar.push(OPEN);
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(inner - filled));
    bar.push(CLOSE);
    bar
}
