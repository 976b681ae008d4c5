//! Contains the PlaneMapper struct, which describes a relationship
//! between a grid of pixels with an origin at 0,0 in the top-left
//! corner, and a rectangle on the complex plane defined by its
//! top-left and bottom-right corners.
use complex::Complex;
use errors::RenderError;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the top-left corner and bottom-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex, pub Complex);

/// Describes the column, row of a pixel in a grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// How the rows of the grid relate to the real axis.  The Mandelbrot
/// set is symmetric about it, so a row below the axis can be copied
/// from its reflection above the axis instead of being sampled.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Symmetry {
    /// The region does not cross the real axis; every row is sampled.
    Disjoint,
    /// The axis lies on the given row and at least as many rows lie
    /// above it as below.  Rows `0..=axis` are sampled and every row
    /// below the axis is a reflection.
    AboveLarger(usize),
    /// The axis lies on the given row and more rows lie below it.
    /// Rows `0..=axis` are sampled, rows `axis+1..=2*axis` are
    /// reflections, and the rest are sampled.
    BelowLarger(usize),
}

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex cartesian plane.  Maps pixels from one to points on
/// the other.  Row 0 is the top of the image, which is the largest
/// imaginary value.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The width and height of the pixel grid.
    pub integral_plane: IntegralPlane,
    /// The top-left and bottom-right corners of the complex plane.
    pub complex_plane: ComplexPlane,
    // The distance on the complex plane between neighbouring pixels,
    // along the real and imaginary axes.  Both are positive for a
    // well-formed region.
    steps: (f32, f32),
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the pixel grid and the two
    /// corners of the complex plane, and rejects shapes for which no
    /// step size can be computed.
    pub fn new(
        width: u32,
        height: u32,
        top_left: Complex,
        bottom_right: Complex,
    ) -> Result<PlaneMapper, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        let finite = [top_left.re, top_left.im, bottom_right.re, bottom_right.im]
            .iter()
            .all(|v| v.is_finite());
        if !finite || top_left.re == bottom_right.re || top_left.im == bottom_right.im {
            return Err(RenderError::DegenerateRegion);
        }

        if top_left.im < bottom_right.im {
            return Err(RenderError::InvertedRegion);
        }

        // The total size of the region.  The real extent is allowed to
        // run right-to-left; the mapping simply walks backwards.
        let region_width = bottom_right.re - top_left.re;
        let region_height = top_left.im - bottom_right.im;

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width as usize, height as usize),
            complex_plane: ComplexPlane(top_left, bottom_right),
            steps: (
                region_width / (width as f32),
                region_height / (height as f32),
            ),
        })
    }

    /// Width of the pixel grid.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// Height of the pixel grid.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// The (real, imaginary) distance between neighbouring pixels.
    pub fn steps(&self) -> (f32, f32) {
        self.steps
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// nominal point it corresponds to on the complex plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex {
        let origin = self.complex_plane.0;
        Complex::new(
            origin.re + (pixel.0 as f32) * self.steps.0,
            origin.im - (pixel.1 as f32) * self.steps.1,
        )
    }

    /// The four super-sampling points for a pixel: half a step either
    /// side of the nominal point along each axis.
    pub fn subsamples(&self, pixel: &Pixel) -> [Complex; 4] {
        let c = self.pixel_to_point(pixel);
        let (dr, di) = (self.steps.0 / 2.0, self.steps.1 / 2.0);
        [
            Complex::new(c.re - dr, c.im + di),
            Complex::new(c.re + dr, c.im + di),
            Complex::new(c.re - dr, c.im - di),
            Complex::new(c.re + dr, c.im - di),
        ]
    }

    /// Decides which rows can be mirrored rather than sampled.
    pub fn symmetry(&self) -> Symmetry {
        let top = self.complex_plane.0.im;
        let bottom = self.complex_plane.1.im;
        if top <= 0.0 || bottom >= 0.0 {
            return Symmetry::Disjoint;
        }

        // The row nearest the real axis.  Rounding can put it one past
        // the grid when the axis hugs the bottom edge.
        let last = self.height() - 1;
        let axis = ((top / self.steps.1).round() as usize).min(last);

        let above = axis;
        let below = last - axis;
        if above >= below {
            Symmetry::AboveLarger(axis)
        } else {
            Symmetry::BelowLarger(axis)
        }
    }
}
