use graphstream::stream::{
    shared, CollectionStream, EmptyStream, ImplicitStream, IntervalStream, SharedStream, Stream,
    StreamError, Unwrapped,
};

fn one_to_six() -> CollectionStream<i32> {
    (1..=6).collect()
}

#[test]
fn test_filtered_and_reversed() {
    let mut evens = one_to_six().filtered(|x| x % 2 == 0);
    assert_eq!(evens.to_vec(), [2, 4, 6]);
    assert_eq!(evens.to_vec(), [2, 4, 6]);
    assert_eq!(one_to_six().reversed().to_vec(), [6, 5, 4, 3, 2, 1]);
}

#[test]
fn test_concat() {
    let head: CollectionStream<i32> = (1..=3).collect();
    let mut s = head.concat(CollectionStream::new(vec![4, 5]));
    assert_eq!(s.to_vec(), [1, 2, 3, 4, 5]);
    assert_eq!(s.last(), Some(5));
}

#[test]
fn test_remove_first_last() {
    let one_to_three = || -> CollectionStream<i32> { (1..=3).collect() };
    let mut tail = one_to_three().remove_first();
    assert_eq!(tail.to_vec(), [2, 3]);
    assert_eq!(tail.to_vec(), [2, 3]);
    let mut init = one_to_three().remove_last();
    assert_eq!(init.to_vec(), [1, 2]);
    assert_eq!(init.to_vec(), [1, 2]);
}

#[test]
fn test_round_trip() {
    let mut s = one_to_six().mapped(|x| x * 10).filtered(|x| x % 20 != 0);
    assert_eq!(s.forward(), Ok(10));
    assert_eq!(s.forward(), Ok(30));
    let next = s.forward();
    assert_eq!(next, Ok(50));
    assert_eq!(s.backward(), next);
    assert_eq!(s.forward(), next);
    assert!(s.at_end());
    assert_eq!(s.forward(), Err(StreamError::EndOfStream));
}

#[test]
fn test_heterogeneous_streams() {
    let streams: Vec<SharedStream<'_, usize>> = vec![
        shared(IntervalStream::new(2)),
        shared(EmptyStream::new()),
        shared(CollectionStream::new(vec![7, 8]).reversed()),
    ];
    let mut s = CollectionStream::new(streams).concatenate();
    assert_eq!(s.to_vec(), [0, 1, 8, 7]);
    assert_eq!(s.reversed().to_vec(), [7, 8, 1, 0]);
}

#[test]
fn test_implicit_countdown() {
    let mut s = ImplicitStream::new(3)
        .with_at_beginning(|n: &mut i32| *n == 3)
        .with_at_end(|n: &mut i32| *n == 0)
        .with_forward(|n: &mut i32| {
            *n -= 1;
            Ok(*n + 1)
        })
        .with_backward(|n: &mut i32| {
            *n += 1;
            Ok(*n)
        });
    assert_eq!(s.to_vec(), [3, 2, 1]);
    assert_eq!(s.backward(), Ok(1));
    assert_eq!(*s.state(), 1);
}

#[test]
fn test_unwrapped() {
    let s = IntervalStream::new(9).reversed().mapped(|x| x + 1).reversed();
    assert_eq!(s.unwrapped().stop(), 9);
}
