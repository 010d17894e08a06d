//! Indicator layout: index to pixel position, intrinsic size and measurement
//!
//! Indicators are laid out left to right, each `2 * radius` wide with
//! `padding` between neighbours, and the row is centered in the view. When
//! the row is wider than the view it starts at 0 and overflows to the right.

/// Inputs of a single layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutConfig {
    pub count: usize,
    pub radius: u32,
    pub padding: u32,
    pub view_width: u32,
}

impl LayoutConfig {
    pub fn new(count: usize, radius: u32, padding: u32, view_width: u32) -> Self {
        Self {
            count,
            radius,
            padding,
            view_width,
        }
    }

    /// Width of the indicator row without any centering
    pub fn content_width(&self) -> u32 {
        if self.count == 0 {
            return 0;
        }
        let count = self.count as u64;
        let width = count * 2 * self.radius as u64 + (count - 1) * self.padding as u64;
        width.min(u32::MAX as u64) as u32
    }

    /// Intrinsic `(width, height)` of the row
    pub fn desired_size(&self) -> (u32, u32) {
        (self.content_width(), self.radius.saturating_mul(2))
    }

    /// Left edge of the first indicator
    pub fn start_x(&self) -> i64 {
        ((self.view_width as i64 - self.content_width() as i64) / 2).max(0)
    }

    /// Center x of the indicator at `position`
    ///
    /// Positions past the end yield the coordinate reached after walking the
    /// whole row; callers clamp before asking.
    pub fn x_coordinate(&self, position: usize) -> i32 {
        let radius = self.radius as i64;
        let step = radius + self.padding as i64;
        let mut x = self.start_x();

        for i in 0..self.count {
            x += radius;
            if i == position {
                return clamp_i32(x);
            }
            x += step;
        }

        clamp_i32(x)
    }
}

#[inline]
fn clamp_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Constraint handed down by the host for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The host dictates the size
    Exactly(u32),
    /// The size may be anything up to the given bound
    AtMost(u32),
    /// No constraint
    Unspecified,
}

impl MeasureSpec {
    /// Resolve a desired size against this constraint
    pub fn resolve(self, desired: u32) -> u32 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(size) => desired.min(size),
            MeasureSpec::Unspecified => desired,
        }
    }
}

/// Resolve the row's intrinsic size against the host's constraints
pub fn measure(config: &LayoutConfig, width: MeasureSpec, height: MeasureSpec) -> (u32, u32) {
    let (desired_width, desired_height) = config.desired_size();
    (width.resolve(desired_width), height.resolve(desired_height))
}
