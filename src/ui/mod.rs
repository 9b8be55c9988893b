// Terminal drawing of a WaveformPlot.
//
//   NRZ-L Encoding
//        [1] [0] [1]
//   1.0 ────┐   ┌────
//   0.5     │   │
//   0.0     └───┘
//       0   1   2   3

use crate::coding::{HIGH, LOW, Level, NEUTRAL};
use crate::layout::WaveformPlot;
use crate::utils::consts::{
    DEFAULT_CELL_WIDTH, MAX_CELL_WIDTH, MIN_CELL_WIDTH,
};

const ROW_LEVELS: [Level; 3] = [HIGH, NEUTRAL, LOW];
const MARGIN: &str = "    ";

pub struct DrawConfig {
    /// Characters per time unit, clamped to 2..=16 when drawing
    pub cell_width: usize,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

pub fn print_banner() {
    println!("linecode-rs");
}

fn row_of(level: Level) -> usize {
    ROW_LEVELS
        .iter()
        .position(|&l| l == level)
        .unwrap_or_else(|| {
            // off-grid level, snap to the nearest row
            if level > NEUTRAL { 0 } else if level < NEUTRAL { 2 } else { 1 }
        })
}

pub fn draw(plot: &WaveformPlot, config: &DrawConfig) -> String {
    let mut out = String::new();
    out.push_str(&plot.title);
    out.push('\n');

    if plot.points.len() < 2 {
        out.push_str("(empty signal)\n");
        return out;
    }

    let w = config.cell_width.clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH);
    let segments = plot.points.len() - 1;
    let columns = segments * w + 1;

    // label row
    let mut label_row = vec![' '; columns + 1];
    for label in &plot.labels {
        let center = (label.text_x * w as f32).round() as usize;
        if center == 0 || center + 1 >= label_row.len() {
            continue;
        }
        label_row[center - 1] = '[';
        label_row[center] = label.label;
        label_row[center + 1] = ']';
    }

    // trace rows
    let mut grid = vec![vec![' '; columns]; ROW_LEVELS.len()];
    let mut prev_row: Option<usize> = None;
    for (i, point) in plot.points[..segments].iter().enumerate() {
        let row = row_of(point.level);
        let start = i * w;

        let joint = match prev_row {
            None => '─',
            Some(p) if p == row => '─',
            Some(p) => {
                let (top, bottom) = (p.min(row), p.max(row));
                for r in grid.iter_mut().take(bottom).skip(top + 1) {
                    r[start] = '│';
                }
                if p < row {
                    grid[p][start] = '┐';
                    '└'
                } else {
                    grid[p][start] = '┘';
                    '┌'
                }
            }
        };
        grid[row][start] = joint;
        for c in start + 1..=start + w {
            grid[row][c] = '─';
        }
        prev_row = Some(row);
    }

    // time ruler
    let mut ruler = vec![' '; columns + w];
    for t in 0..=segments {
        for (k, ch) in t.to_string().chars().enumerate() {
            if let Some(slot) = ruler.get_mut(t * w + k) {
                *slot = ch;
            }
        }
    }

    push_row(&mut out, MARGIN, &label_row);
    for (level, row) in ROW_LEVELS.iter().zip(&grid) {
        push_row(&mut out, &format!("{:.1} ", level), row);
    }
    push_row(&mut out, MARGIN, &ruler);

    out
}

fn push_row(out: &mut String, prefix: &str, row: &[char]) {
    let line: String = row.iter().collect();
    out.push_str(prefix);
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coding::Scheme;
    use crate::layout::encode_and_render;

    #[test]
    fn test_draw_nrz_l() {
        let plot = encode_and_render(Scheme::NrzL, "101").unwrap();
        let text = draw(&plot, &DrawConfig::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "NRZ-L Encoding");
        assert_eq!(lines[1], "     [1] [0] [1]");
        assert_eq!(lines[2], "1.0 ────┐   ┌────");
        assert_eq!(lines[3], "0.5     │   │");
        assert_eq!(lines[4], "0.0     └───┘");
        assert_eq!(lines[5], "    0   1   2   3");
    }

    #[test]
    fn test_draw_bipolar_uses_middle_row() {
        let plot = encode_and_render(Scheme::BipolarAmi, "10").unwrap();
        let text = draw(&plot, &DrawConfig::default());
        assert!(text.lines().nth(3).unwrap().contains('─'));
    }

    #[test]
    fn test_draw_empty() {
        let plot = encode_and_render(Scheme::Manchester, "").unwrap();
        assert_eq!(
            draw(&plot, &DrawConfig::default()),
            "Manchester Encoding\n(empty signal)\n"
        );
    }

    #[test]
    fn test_draw_clamps_cell_width() {
        let plot = encode_and_render(Scheme::NrzL, "10").unwrap();
        let huge = draw(
            &plot,
            &DrawConfig {
                cell_width: usize::MAX / 2,
            },
        );
        let widest = draw(
            &plot,
            &DrawConfig {
                cell_width: MAX_CELL_WIDTH,
            },
        );
        assert_eq!(huge, widest);

        let narrow = draw(&plot, &DrawConfig { cell_width: 0 });
        let lines: Vec<&str> = narrow.lines().collect();
        assert_eq!(lines[2], "1.0 ──┐");
        assert_eq!(lines[4], "0.0   └──");
    }

    #[test]
    fn test_row_of_snaps_to_grid() {
        assert_eq!(row_of(HIGH), 0);
        assert_eq!(row_of(NEUTRAL), 1);
        assert_eq!(row_of(LOW), 2);
        assert_eq!(row_of(0.9), 0);
    }
}
