/// A hook called by a solver between steps.
///
/// `E` is the event the solver reports and `A` the action it accepts back.
/// Returning `None` leaves the run alone. Any `FnMut(&E) -> Option<A>` closure
/// is an observer, and `()` is the observer that never acts.
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
    fn observe(&mut self, _: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
    }

    fn drive<O: Observer<usize, Action>>(mut observer: O, events: &[usize]) -> Option<usize> {
        events
            .iter()
            .find(|event| observer.observe(event).is_some())
            .copied()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), &[1, 2, 3]), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let observer = |event: &usize| (*event >= 2).then_some(Action::Stop);
        assert_eq!(drive(observer, &[1, 2, 3]), Some(2));
    }

    #[test]
    fn closure_observer_can_record() {
        let mut seen = Vec::new();
        let observer = |event: &usize| {
            seen.push(*event);
            None::<Action>
        };
        drive(observer, &[4, 5]);
        assert_eq!(seen, vec![4, 5]);
    }
}
