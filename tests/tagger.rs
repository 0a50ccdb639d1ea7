//! Integration tests for the public tagging surface.

use std::sync::{Arc, Barrier};
use std::thread;

use tagref::{Tag, Tagger};

#[derive(Debug, PartialEq)]
struct Point {
    x: i32,
}

#[test]
fn same_object_gets_the_same_tag() {
    let tagger = Tagger::new();
    let object = Arc::new(Point { x: 1 });

    let first = tagger.tag(&object);
    let second = tagger.tag(&object);
    assert_eq!(first, second);
}

#[test]
fn equal_content_distinct_objects_get_distinct_tags() {
    let tagger = Tagger::new();
    let first = Arc::new(Point { x: 1 });
    let second = Arc::new(Point { x: 1 });
    assert_eq!(*first, *second);

    assert_ne!(tagger.tag(&first), tagger.tag(&second));
}

#[test]
fn separate_taggers_assign_unrelated_tags() {
    let left = Tagger::new();
    let right = Tagger::new();
    let object = Arc::new(Point { x: 1 });

    assert_ne!(left.tag(&object), right.tag(&object));
}

#[test]
fn tags_are_hyphenated_uuids() {
    let tagger = Tagger::new();
    let object = Arc::new(Point { x: 1 });

    let tag = tagger.tag(&object);
    let text = tag.as_str();
    assert_eq!(text.len(), 36);
    for (index, ch) in text.chars().enumerate() {
        match index {
            8 | 13 | 18 | 23 => assert_eq!(ch, '-', "expected hyphen at {index} in {text}"),
            _ => assert!(
                ch.is_ascii_hexdigit(),
                "expected hex digit at {index} in {text}"
            ),
        }
    }
}

#[test]
fn many_objects_get_pairwise_distinct_tags() {
    let tagger = Tagger::new();
    let objects: Vec<Arc<u32>> = (0..100).map(Arc::new).collect();

    let mut tags: Vec<Tag> = objects.iter().map(|object| tagger.tag(object)).collect();
    tags.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    tags.dedup();
    assert_eq!(tags.len(), 100);
}

#[test]
fn heterogeneous_objects_share_one_tagger() {
    let tagger: Tagger<dyn std::any::Any + Send + Sync> = Tagger::new();
    let number: Arc<dyn std::any::Any + Send + Sync> = Arc::new(5u32);
    let text: Arc<dyn std::any::Any + Send + Sync> = Arc::new(String::from("five"));

    let number_tag = tagger.tag(&number);
    assert_ne!(number_tag, tagger.tag(&text));
    assert_eq!(number_tag, tagger.tag(&number));
}

#[test]
fn racing_threads_agree_on_a_fresh_object() {
    let tagger = Arc::new(Tagger::new());
    let object = Arc::new(Point { x: 1 });
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let tagger = Arc::clone(&tagger);
            let object = Arc::clone(&object);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                tagger.tag(&object)
            })
        })
        .collect();

    let tags: Vec<Tag> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for tag in &tags {
        assert_eq!(*tag, tags[0]);
    }
}
