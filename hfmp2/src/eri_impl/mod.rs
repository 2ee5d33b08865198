//! Dense two-electron integral tensor
//!
//! Integral stores deliver only the symmetry-unique two-electron integrals
//! <ij|kl>. For real orbitals each value is shared by eight index tuples:
//!
//! <ij|kl> = <il|kj> = <kl|ij> = <kj|il> = <ji|lk> = <li|jk> = <lk|ji> = <jk|li>
//!
//! The energy evaluators need O(1) random access, so the sparse list is expanded
//! once into a dense mo_num^4 array. That array dominates the memory cost of the
//! whole calculation and its allocation is checked rather than assumed.

mod eri;

pub use eri::{symmetry_equivalents, DenseEri, SparseIntegral, SparseIntegrals};
