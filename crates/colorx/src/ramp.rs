use std::marker::PhantomData;

use crate::color::{hsl_to_packed, packed_to_hsl};
use crate::core::{from_grid, grid_point, to_grid, to_step, LIGHTNESS_GRID};
use crate::error::OutOfBoundsError;
use crate::{Color, Float, PackedColor};

/// A ramp of shades or tints.
///
/// A ramp holds hue, saturation, and alpha of some color constant while
/// stepping lightness from the color's own lightness to either 0 for shades or
/// 1 for tints. It always yields `count + 1` colors, with both endpoints
/// included. Lightness steps across a fixed-point grid with
/// [`LIGHTNESS_GRID`](crate::LIGHTNESS_GRID) units, which keeps the ramp free
/// of accumulated floating point error.
///
/// Ramps are lazy and cheap to clone, so cloning a fresh ramp is the way to
/// iterate over the same colors twice. They also support iteration from the
/// back and random access with [`Ramp::get`].
///
/// ```
/// # use colorx::{Color, error::OutOfBoundsError, repr::Rgb};
/// let tints = Rgb::new(255, 0, 0).tints(3)?;
/// assert_eq!(tints.len(), 4);
/// assert_eq!(tints.get(1), Some(Rgb::new(255, 85, 85)));
/// assert_eq!(tints.clone().last(), Some(Rgb::new(255, 255, 255)));
/// assert_eq!(tints.rev().next(), Some(Rgb::new(255, 255, 255)));
/// # Ok::<(), OutOfBoundsError>(())
/// ```
#[derive(Debug)]
pub struct Ramp<C> {
    hue: Float,
    saturation: Float,
    alpha: u8,
    start: i64,
    end: i64,
    step: i64,
    count: usize,
    front: usize,
    back: usize,
    color: PhantomData<fn() -> C>,
}

impl<C: Color> Ramp<C> {
    /// Create a new ramp of shades.
    pub(crate) fn shades(packed: PackedColor, count: usize) -> Result<Self, OutOfBoundsError> {
        Self::checked(packed, 0, count)
    }

    /// Create a new ramp of tints.
    pub(crate) fn tints(packed: PackedColor, count: usize) -> Result<Self, OutOfBoundsError> {
        Self::checked(packed, LIGHTNESS_GRID, count)
    }

    fn checked(packed: PackedColor, end: i64, count: usize) -> Result<Self, OutOfBoundsError> {
        if count == 0 {
            log::debug!("rejecting ramp for {} with zero steps", packed);
            return Err(OutOfBoundsError::new(count, 1..=usize::MAX));
        }

        Ok(Self::with_end(packed, end, count))
    }

    /// Create a new ramp toward the given grid point. The count must be
    /// positive.
    pub(crate) fn with_end(packed: PackedColor, end: i64, count: usize) -> Self {
        let [hue, saturation, lightness] = packed_to_hsl(packed);
        let start = to_grid(lightness);
        let step = to_step(start, end, count);

        log::trace!(
            "ramp for {} from {} to {} in {} steps of {}",
            packed,
            start,
            end,
            count,
            step
        );

        Self {
            hue,
            saturation,
            alpha: packed.alpha(),
            start,
            end,
            step,
            count,
            front: 0,
            // A count of usize::MAX yields one color short of count + 1.
            back: count.saturating_add(1),
            color: PhantomData,
        }
    }

    /// Get the color with the given index amongst the remaining colors.
    ///
    /// This method returns `None` if the index is out of bounds. It does not
    /// consume any colors.
    pub fn get(&self, index: usize) -> Option<C> {
        let absolute = self.front.checked_add(index)?;
        if self.back <= absolute {
            None
        } else {
            Some(self.color_at(absolute))
        }
    }

    fn color_at(&self, index: usize) -> C {
        let point = grid_point(self.start, self.end, self.step, self.count, index);
        C::from_packed(hsl_to_packed(
            &[self.hue, self.saturation, from_grid(point)],
            self.alpha,
        ))
    }
}

impl<C> Clone for Ramp<C> {
    fn clone(&self) -> Self {
        Self {
            color: PhantomData,
            ..*self
        }
    }
}

impl<C: Color> Iterator for Ramp<C> {
    type Item = C;

    fn next(&mut self) -> Option<Self::Item> {
        if self.back <= self.front {
            None
        } else {
            let index = self.front;
            self.front += 1;
            Some(self.color_at(index))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<C: Color> DoubleEndedIterator for Ramp<C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.back <= self.front {
            None
        } else {
            self.back -= 1;
            Some(self.color_at(self.back))
        }
    }
}

impl<C: Color> ExactSizeIterator for Ramp<C> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<C: Color> std::iter::FusedIterator for Ramp<C> {}
