use glam::Vec2;
use smallvec::SmallVec;

use crate::color::Rgba;

/// One canvas path command, in the particle's local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    CubicTo { c1: Vec2, c2: Vec2, to: Vec2 },
    Arc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
    },
    Close,
}

/// A small vector path. The largest shape (the maple outline) needs 15
/// commands, so paths normally stay inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    cmds: SmallVec<[PathCmd; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.cmds.push(PathCmd::MoveTo(Vec2::new(x, y)));
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.cmds.push(PathCmd::LineTo(Vec2::new(x, y)));
        self
    }

    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) -> &mut Self {
        self.cmds.push(PathCmd::QuadTo {
            ctrl: Vec2::new(cx, cy),
            to: Vec2::new(x, y),
        });
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn cubic_to(
        &mut self,
        c1x: f32,
        c1y: f32,
        c2x: f32,
        c2y: f32,
        x: f32,
        y: f32,
    ) -> &mut Self {
        self.cmds.push(PathCmd::CubicTo {
            c1: Vec2::new(c1x, c1y),
            c2: Vec2::new(c2x, c2y),
            to: Vec2::new(x, y),
        });
        self
    }

    pub fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32) -> &mut Self {
        self.cmds.push(PathCmd::Arc {
            center: Vec2::new(cx, cy),
            radius,
            start,
            end,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    #[inline]
    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self.cmds.last(), Some(PathCmd::Close))
    }

    /// First point of the first subpath.
    pub fn start_point(&self) -> Option<Vec2> {
        match self.cmds.first()? {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) => Some(*p),
            PathCmd::QuadTo { to, .. } | PathCmd::CubicTo { to, .. } => Some(*to),
            PathCmd::Arc {
                center,
                radius,
                start,
                ..
            } => Some(arc_point(*center, *radius, *start)),
            PathCmd::Close => None,
        }
    }

    /// The pen position after the last command. `Close` returns the pen to
    /// the start of the current subpath, as the canvas does.
    pub fn end_point(&self) -> Option<Vec2> {
        let mut current: Option<Vec2> = None;
        let mut subpath_start: Option<Vec2> = None;
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => {
                    subpath_start = Some(p);
                    current = Some(p);
                }
                PathCmd::LineTo(p)
                | PathCmd::QuadTo { to: p, .. }
                | PathCmd::CubicTo { to: p, .. } => {
                    if subpath_start.is_none() {
                        subpath_start = Some(p);
                    }
                    current = Some(p);
                }
                PathCmd::Arc {
                    center,
                    radius,
                    start,
                    end,
                } => {
                    if subpath_start.is_none() {
                        subpath_start = Some(arc_point(center, radius, start));
                    }
                    current = Some(arc_point(center, radius, end));
                }
                PathCmd::Close => current = subpath_start,
            }
        }
        current
    }
}

#[inline]
fn arc_point(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    center + Vec2::new(angle.cos(), angle.sin()) * radius
}

/// How a path is put on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Fill(Rgba),
    /// Round-capped stroke.
    Stroke { color: Rgba, width: f32 },
    /// Punch the path out of whatever is already drawn (`destination-out`).
    Erase,
}
