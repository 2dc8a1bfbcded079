use crate::IntRb as Rb;
