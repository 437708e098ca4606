#![forbid(unsafe_code)]

//! Fixed-position placement math for the floating panel.
//!
//! Pure computation: the host applies the resulting [`Placement`] to its
//! surface however it styles things. Offsets follow CSS conventions, with
//! `HalfScreen` standing in for a `50%` edge plus a pixel margin.

/// Vertical alignment of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vertical {
    /// Pinned to the top edge.
    Top,
    /// Vertically centered.
    Middle,
    /// Pinned to the bottom edge.
    #[default]
    Bottom,
}

/// Horizontal alignment of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Horizontal {
    /// Pinned to the left edge.
    Left,
    /// Horizontally centered.
    Center,
    /// Pinned to the right edge.
    #[default]
    Right,
}

/// Placement configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementConfig {
    /// Width of the centered content column the panel hugs. `0.0` aligns
    /// to the screen edge instead.
    pub content_width: f64,
    /// Vertical alignment.
    pub vertical: Vertical,
    /// Horizontal alignment.
    pub horizontal: Horizontal,
    /// Pixel nudge applied after alignment, `(x, y)`.
    pub offset: (f64, f64),
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            content_width: 980.0,
            vertical: Vertical::Bottom,
            horizontal: Horizontal::Right,
            offset: (10.0, 10.0),
        }
    }
}

/// A resolved edge offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    /// Fixed pixel distance from the edge.
    Px(f64),
    /// Half the screen, i.e. a `50%` edge; combined with a pixel margin.
    HalfScreen,
}

/// Resolved fixed placement for the panel surface.
///
/// Unset fields are left to the host's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    pub left: Option<Edge>,
    pub right: Option<Edge>,
    pub top: Option<Edge>,
    pub bottom: Option<Edge>,
    pub margin_left: Option<f64>,
    pub margin_top: Option<f64>,
}

impl Placement {
    /// Compute the panel's fixed placement from its configuration and
    /// measured size.
    pub fn compute(config: &PlacementConfig, panel_width: f64, panel_height: f64) -> Self {
        let mut placement = Self::default();

        if config.content_width != 0.0 {
            // Hug the centered content column: anchor at the screen
            // midline and push out past half the column width.
            let reach = config.content_width / 2.0 + config.offset.0;
            placement.left = Some(Edge::HalfScreen);
            placement.margin_left = Some(match config.horizontal {
                Horizontal::Right => reach,
                _ => -reach - panel_width,
            });
        } else {
            match config.horizontal {
                Horizontal::Left => placement.left = Some(Edge::Px(config.offset.0)),
                Horizontal::Right => placement.right = Some(Edge::Px(config.offset.0)),
                // Center has no edge form; handled below.
                Horizontal::Center => {}
            }
        }

        if config.horizontal == Horizontal::Center {
            placement.left = Some(Edge::HalfScreen);
            placement.margin_left = Some(-panel_width / 2.0 + config.offset.0);
        }

        match config.vertical {
            Vertical::Middle => {
                placement.top = Some(Edge::HalfScreen);
                placement.margin_top = Some(-(panel_height / 2.0) + config.offset.1);
            }
            Vertical::Top => placement.top = Some(Edge::Px(config.offset.1)),
            Vertical::Bottom => placement.bottom = Some(Edge::Px(config.offset.1)),
        }

        placement
    }
}
