//! Lifetimes are the subtyping Rust actually has: `&'static str` is a
//! subtype of `&'a str` for every `'a`.
//!
//! `VariantBox<T>` is covariant in `T` (it is an `Option<T>` underneath), so
//! a `&VariantBox<&'static str>` is accepted wherever a
//! `&VariantBox<&'a str>` is expected, even by the invariant copy pair. A
//! `&mut VariantBox<T>` is invariant in `T`: otherwise a short-lived
//! reference could be written into a box that promises `'static`.
//!
//! ```compile_fail
//! use variant_box::VariantBox;
//!
//! fn assign<T>(dest: &mut VariantBox<T>, value: T) {
//!     dest.set_value(value);
//! }
//!
//! let mut hello: VariantBox<&'static str> = VariantBox::with_value("hello");
//! {
//!     let world = String::from("world");
//!     assign(&mut hello, world.as_str());
//! }
//! println!("{:?}", hello.get_value()); // use after free
//! ```
