use corelib::math::{DAffine2, Vector};
use corelib::option_usize_env;
use smallvec::SmallVec;

// snapshots kept inline before the stack spills to the heap
const MATRIX_STACK_HINT: usize = option_usize_env!("SK_MATRIX_STACK_HINT", 30);

/// Transform state captured by [`Canvas::push_matrix`](crate::Canvas::push_matrix)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransformSnapshot {
    pub translation: Vector,
    pub scale: Vector,
    pub rotation: f64,
    /// Surface matrix at capture time
    pub matrix: DAffine2,
}

impl Default for TransformSnapshot {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformSnapshot {
    pub const IDENTITY: TransformSnapshot = TransformSnapshot {
        translation: Vector::ZERO,
        scale: Vector::ONE,
        rotation: 0.0,
        matrix: DAffine2::IDENTITY,
    };
}

/// LIFO of snapshots over an identity base that can't be popped
#[derive(Clone, Debug, Default)]
pub struct MatrixStack {
    stack: SmallVec<TransformSnapshot, MATRIX_STACK_HINT>,
}

impl MatrixStack {
    pub fn push(&mut self, snapshot: TransformSnapshot) {
        self.stack.push(snapshot);
    }

    /// Pops the last pushed snapshot, `None` when only the base is left
    pub fn pop(&mut self) -> Option<TransformSnapshot> {
        self.stack.pop()
    }

    /// Number of snapshots, base included, so never less than 1
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::math::dvec2;

    #[test]
    fn test_matrix_stack_default() {
        let stack = MatrixStack::default();
        assert_eq!(stack.depth(), 1);
        assert_eq!(TransformSnapshot::default(), TransformSnapshot::IDENTITY);
    }

    #[test]
    fn test_matrix_stack_push_and_pop() {
        let mut stack = MatrixStack::default();
        let snapshot = TransformSnapshot {
            translation: Vector::new(5.0, 5.0),
            scale: Vector::splat(2.0),
            rotation: 0.5,
            matrix: DAffine2::from_translation(dvec2(5.0, 5.0)),
        };

        stack.push(TransformSnapshot::IDENTITY);
        stack.push(snapshot);
        assert_eq!(stack.depth(), 3);

        assert_eq!(stack.pop(), Some(snapshot));
        assert_eq!(stack.pop(), Some(TransformSnapshot::IDENTITY));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_matrix_stack_base_is_never_popped() {
        let mut stack = MatrixStack::default();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.depth(), 1);
    }
}
