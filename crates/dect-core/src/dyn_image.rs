use crate::Error;
use crate::geometry::Geometry;
use crate::image::Image;
use crate::sample::{PixelType, Sample};

/// Expands `$body` once per sample-type variant of a [`RankedImage`], with
/// `$bound` bound to the typed [`Image`] inside.
#[macro_export]
macro_rules! match_sample {
    ($image:expr, $bound:ident => $body:expr) => {
        match $image {
            $crate::RankedImage::U8($bound) => $body,
            $crate::RankedImage::I8($bound) => $body,
            $crate::RankedImage::U16($bound) => $body,
            $crate::RankedImage::I16($bound) => $body,
            $crate::RankedImage::U32($bound) => $body,
            $crate::RankedImage::I32($bound) => $body,
            $crate::RankedImage::F32($bound) => $body,
            $crate::RankedImage::F64($bound) => $body,
        }
    };
}

/// Expands `$body` once per rank variant of a [`DynImage`], with `$bound`
/// bound to the [`RankedImage`] inside.
#[macro_export]
macro_rules! match_rank {
    ($image:expr, $bound:ident => $body:expr) => {
        match $image {
            $crate::DynImage::D1($bound) => $body,
            $crate::DynImage::D2($bound) => $body,
            $crate::DynImage::D3($bound) => $body,
            $crate::DynImage::D4($bound) => $body,
        }
    };
}

/// Image of known rank whose sample type is resolved at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum RankedImage<const D: usize> {
    U8(Image<u8, D>),
    I8(Image<i8, D>),
    U16(Image<u16, D>),
    I16(Image<i16, D>),
    U32(Image<u32, D>),
    I32(Image<i32, D>),
    F32(Image<f32, D>),
    F64(Image<f64, D>),
}

impl<const D: usize> RankedImage<D> {
    pub fn pixel_type(&self) -> PixelType {
        match_sample!(self, img => pixel_type_of(img))
    }

    pub fn extent(&self) -> &[usize; D] {
        match_sample!(self, img => img.extent())
    }

    pub fn geometry(&self) -> &Geometry<D> {
        match_sample!(self, img => img.geometry())
    }

    pub fn len(&self) -> usize {
        match_sample!(self, img => img.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_f64(&self) -> Image<f64, D> {
        match_sample!(self, img => img.to_f64())
    }

    pub fn as_f64(&self) -> Option<&Image<f64, D>> {
        match self {
            Self::F64(img) => Some(img),
            _ => None,
        }
    }
}

fn pixel_type_of<T: Sample, const D: usize>(_: &Image<T, D>) -> PixelType {
    T::PIXEL_TYPE
}

impl<T: Sample, const D: usize> From<Image<T, D>> for RankedImage<D> {
    fn from(image: Image<T, D>) -> Self {
        T::into_ranked(image)
    }
}

/// Image whose rank and sample type are both resolved at runtime.
///
/// Only ranks `1..=4` are representable. Shapes of any other rank are
/// rejected with [`Error::UnsupportedDimension`] when they are turned into a
/// `DynImage`, so everything downstream can match exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum DynImage {
    D1(RankedImage<1>),
    D2(RankedImage<2>),
    D3(RankedImage<3>),
    D4(RankedImage<4>),
}

impl DynImage {
    /// Builds an image from a runtime extent and a sample buffer.
    pub fn from_shape<T: Sample>(extent: &[usize], data: Vec<T>) -> Result<Self, Error> {
        match extent.len() {
            1 => Ok(Self::D1(ranked_from_shape::<T, 1>(extent, data)?.into())),
            2 => Ok(Self::D2(ranked_from_shape::<T, 2>(extent, data)?.into())),
            3 => Ok(Self::D3(ranked_from_shape::<T, 3>(extent, data)?.into())),
            4 => Ok(Self::D4(ranked_from_shape::<T, 4>(extent, data)?.into())),
            rank => Err(Error::UnsupportedDimension { rank }),
        }
    }

    pub fn rank(&self) -> usize {
        match self {
            Self::D1(_) => 1,
            Self::D2(_) => 2,
            Self::D3(_) => 3,
            Self::D4(_) => 4,
        }
    }

    pub fn pixel_type(&self) -> PixelType {
        match_rank!(self, img => img.pixel_type())
    }

    pub fn extent(&self) -> &[usize] {
        match_rank!(self, img => img.extent().as_slice())
    }

    pub fn origin(&self) -> &[f64] {
        match_rank!(self, img => img.geometry().origin().as_slice())
    }

    pub fn spacing(&self) -> &[f64] {
        match_rank!(self, img => img.geometry().spacing().as_slice())
    }

    pub fn len(&self) -> usize {
        match_rank!(self, img => img.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples widened to `f64`, in storage order.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match_rank!(self, img => img.to_f64().into_data())
    }

    /// Borrows the samples when the image already stores `f64`.
    pub fn as_f64_slice(&self) -> Option<&[f64]> {
        match_rank!(self, img => img.as_f64().map(|i| i.data()))
    }
}

fn ranked_from_shape<T: Sample, const D: usize>(
    extent: &[usize],
    data: Vec<T>,
) -> Result<Image<T, D>, Error> {
    let extent: [usize; D] = extent
        .try_into()
        .map_err(|_| Error::UnsupportedDimension { rank: extent.len() })?;
    Image::from_vec(extent, data)
}

macro_rules! impl_from_rank {
    ($($rank:literal => $variant:ident),* $(,)?) => {
        $(
            impl From<RankedImage<$rank>> for DynImage {
                fn from(image: RankedImage<$rank>) -> Self {
                    Self::$variant(image)
                }
            }

            impl<T: Sample> From<Image<T, $rank>> for DynImage {
                fn from(image: Image<T, $rank>) -> Self {
                    Self::$variant(image.into())
                }
            }
        )*
    };
}

impl_from_rank!(1 => D1, 2 => D2, 3 => D3, 4 => D4);
