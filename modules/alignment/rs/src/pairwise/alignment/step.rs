use std::borrow::Borrow;
use std::fmt::Display;

use derive_getters::{Dissolve, Getters};
use eyre::Result;

use alnkit_core_rs::num::PrimUInt;

use super::op::Op;

/// A run of identical operations in a pairwise alignment
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step<Len: PrimUInt> {
    /// The length of the operation, e.g. the number of consequent matches or gaps.
    /// Guaranteed to be greater than zero.
    len: Len,
    /// The alignment operation
    op: Op,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Result<Self> {
        if len.is_zero() {
            return Err(eyre::eyre!("Step length must be greater than zero"));
        }
        Ok(Self { len, op })
    }

    /// Optimize the sequence of steps by collapsing identical operations to minimize the memory usage.
    /// If the sum of the lengths exceeds the maximum value of the step size, the step is divided accordingly.
    pub fn collapse(steps: &mut Vec<Step<Len>>) {
        if steps.is_empty() || steps.len() == 1 {
            return;
        }

        let (mut writep, mut readp) = (0, 1);

        while readp < steps.len() {
            if steps[writep].op == steps[readp].op {
                // If the sum of the lengths exceeds the maximum value of the step size, split the step
                match steps[writep].len.checked_add(&steps[readp].len) {
                    Some(x) => steps[writep].len = x,
                    None => {
                        steps[readp].len =
                            steps[readp].len - (Len::max_value() - steps[writep].len);
                        debug_assert!(steps[readp].len > Len::zero());
                        steps[writep].len = Len::max_value();

                        writep += 1;
                        steps[writep] = steps[readp];
                    }
                }
            } else {
                writep += 1;
                steps[writep] = steps[readp];
            }
            readp += 1;
        }
        steps.truncate(writep + 1);
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        // 2 symbols is an average length of a step
        // 1 is the length of the symbol
        let hint = match steps.size_hint() {
            (_, Some(upper)) => upper * 3,
            (lower, _) => lower * 3,
        };

        let mut result = String::with_capacity(hint);
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len().to_string());
            result.push(step.op().symbol());
        }
        result
    }
}
