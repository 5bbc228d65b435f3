//! Operator overloads shared by the vector types
//!
//! Every vector is a `#[repr(C)]` struct of named `f32` fields, so the
//! arithmetic is component-wise and generated from the field list.

macro_rules! impl_vector_ops {
    ($ty:ident { $($f:ident),+ }) => {
        impl std::ops::Add for $ty {
            type Output = Self;
            #[inline]
            fn add(self, other: Self) -> Self {
                Self { $($f: self.$f + other.$f),+ }
            }
        }

        impl std::ops::AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                $(self.$f += other.$f;)+
            }
        }

        impl std::ops::Sub for $ty {
            type Output = Self;
            #[inline]
            fn sub(self, other: Self) -> Self {
                Self { $($f: self.$f - other.$f),+ }
            }
        }

        impl std::ops::SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                $(self.$f -= other.$f;)+
            }
        }

        impl std::ops::Mul<f32> for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, scalar: f32) -> Self {
                Self { $($f: self.$f * scalar),+ }
            }
        }

        impl std::ops::Mul<$ty> for f32 {
            type Output = $ty;
            #[inline]
            fn mul(self, v: $ty) -> $ty {
                v * self
            }
        }

        impl std::ops::MulAssign<f32> for $ty {
            #[inline]
            fn mul_assign(&mut self, scalar: f32) {
                $(self.$f *= scalar;)+
            }
        }

        impl std::ops::Div<f32> for $ty {
            type Output = Self;
            #[inline]
            fn div(self, scalar: f32) -> Self {
                Self { $($f: self.$f / scalar),+ }
            }
        }

        impl std::ops::Neg for $ty {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        impl $ty {
            /// Dot product
            #[inline]
            pub fn dot(self, other: Self) -> f32 {
                0.0 $(+ self.$f * other.$f)+
            }

            /// Length squared (faster than length)
            #[inline]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            /// Length (magnitude)
            #[inline]
            pub fn length(self) -> f32 {
                self.length_squared().sqrt()
            }

            /// Normalize to unit length (zero stays zero)
            #[inline]
            pub fn normalized(self) -> Self {
                let len = self.length();
                if len > 0.0 {
                    self * (1.0 / len)
                } else {
                    Self::ZERO
                }
            }

            /// Component-wise absolute value
            #[inline]
            pub fn abs(self) -> Self {
                Self { $($f: self.$f.abs()),+ }
            }

            /// Component-wise minimum
            #[inline]
            pub fn min_components(self, other: Self) -> Self {
                Self { $($f: self.$f.min(other.$f)),+ }
            }

            /// Component-wise maximum
            #[inline]
            pub fn max_components(self, other: Self) -> Self {
                Self { $($f: self.$f.max(other.$f)),+ }
            }

            /// Clamp each component between corresponding min and max values
            #[inline]
            pub fn clamp_components(self, min: Self, max: Self) -> Self {
                Self { $($f: self.$f.clamp(min.$f, max.$f)),+ }
            }

            /// Component-wise multiplication (Hadamard product)
            #[inline]
            pub fn component_mul(self, other: Self) -> Self {
                Self { $($f: self.$f * other.$f),+ }
            }

            /// Component-wise division
            #[inline]
            pub fn component_div(self, other: Self) -> Self {
                Self { $($f: self.$f / other.$f),+ }
            }

            /// Largest component
            #[inline]
            pub fn max_element(self) -> f32 {
                f32::NEG_INFINITY $(.max(self.$f))+
            }

            /// Smallest component
            #[inline]
            pub fn min_element(self) -> f32 {
                f32::INFINITY $(.min(self.$f))+
            }

            /// Clamp every component to be at least zero
            #[inline]
            pub fn max_zero(self) -> Self {
                self.max_components(Self::ZERO)
            }
        }
    };
}
