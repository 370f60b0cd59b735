//! End-to-end planning scenarios on small, hand-checked graphs

mod services;
