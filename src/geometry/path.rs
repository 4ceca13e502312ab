//! Path data (`d` attribute) construction.

use std::fmt;

use crate::svg::fmt_num;

/// A 2D point in document coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", fmt_num(self.x), fmt_num(self.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc; `sweep` is the SVG sweep flag (true = clockwise on screen).
    Arc {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

/// Ordered list of path commands, serialized as `M x,y L x,y ... Z`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn move_to(mut self, point: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    #[must_use]
    pub fn line_to(mut self, point: Point) -> Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    #[must_use]
    pub fn arc_to(mut self, radius: f64, large_arc: bool, sweep: bool, to: Point) -> Self {
        self.commands.push(PathCommand::Arc {
            radius,
            large_arc,
            sweep,
            to,
        });
        self
    }

    #[must_use]
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Points visited by move/line/arc commands, in order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|cmd| match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
                PathCommand::Arc { to, .. } => Some(to),
                PathCommand::Close => None,
            })
            .collect()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match cmd {
                PathCommand::MoveTo(p) => write!(f, "M {p}")?,
                PathCommand::LineTo(p) => write!(f, "L {p}")?,
                PathCommand::Arc {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => {
                    let r = fmt_num(*radius);
                    write!(
                        f,
                        "A {r},{r} 0 {} {} {to}",
                        u8::from(*large_arc),
                        u8::from(*sweep)
                    )?;
                }
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Serialize points as a `points` attribute (`x,y x,y ...`).
#[must_use]
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
