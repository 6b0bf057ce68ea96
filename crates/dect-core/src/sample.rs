use core::fmt;

use crate::dyn_image::RankedImage;
use crate::image::Image;

/// Runtime tag for the scalar type stored in an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    F32,
    F64,
}

impl PixelType {
    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for PixelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scalar sample types an image may hold.
///
/// Every sample type widens losslessly into `f64`, which is the type all
/// arithmetic runs in.
pub trait Sample: Copy + Send + Sync + 'static {
    const PIXEL_TYPE: PixelType;

    fn to_f64(self) -> f64;

    fn into_ranked<const D: usize>(image: Image<Self, D>) -> RankedImage<D>;
}

macro_rules! impl_sample {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Sample for $ty {
                const PIXEL_TYPE: PixelType = PixelType::$variant;

                #[inline]
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }

                fn into_ranked<const D: usize>(image: Image<Self, D>) -> RankedImage<D> {
                    RankedImage::$variant(image)
                }
            }
        )*
    };
}

impl_sample!(
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    f32 => F32,
    f64 => F64,
);
