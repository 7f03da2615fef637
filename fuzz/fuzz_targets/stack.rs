#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nodestack::{Stack, StackError};

#[derive(Arbitrary, Debug)]
enum Action {
    Push(i16),
    Pop,
    Peek,
    SearchValue(i16),
    SearchIndex(i32),
    Destroy,
    Shrink,
}

use self::Action::*;

fuzz_target!(|actions: Vec<Action>| {
    let mut stack = Stack::new();
    let mut model = Vec::new();
    for action in actions {
        match action {
            Push(value) => {
                assert!(stack.push(value).is_ok());
                model.push(value);
            }
            Pop => match model.pop() {
                Some(value) => assert_eq!(Ok(value), stack.pop()),
                None => assert_eq!(Err(StackError::EmptyStack), stack.pop()),
            },
            Peek => {
                assert_eq!(model.last(), stack.peek());
            }
            SearchValue(value) => {
                let expected = model.iter().rev().position(|item| *item == value);
                assert_eq!(expected, stack.position(&value));
            }
            SearchIndex(index) => {
                let expected = if index < 0 {
                    None
                } else {
                    model.iter().rev().nth(index as usize)
                };
                assert_eq!(expected, stack.search_by_index(index));
            }
            Destroy => {
                stack.destroy();
                model.clear();
            }
            Shrink => stack.shrink_to_fit(),
        }
        assert_eq!(model.len(), stack.len());
        assert_eq!(model.is_empty(), stack.is_empty());
    }
    assert!(stack.into_iter().eq(model.into_iter().rev()));
});
