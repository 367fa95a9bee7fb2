/// Watches solver iterations and optionally steers them.
///
/// A solver hands every iteration event to its observer. Returning `None`
/// lets the solver carry on; `Some(action)` asks for a solver-specific
/// action such as stopping early.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, as is `&mut` to
/// one. `()` is the observer that never acts.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
