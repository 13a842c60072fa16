use focus_indicator::util::{average, keep_last, lerp};
use glam::Vec3;

#[test]
fn test_lerp() {
    let a = Vec3::new(0.0, 10.0, -2.0);
    let b = Vec3::new(1.0, 20.0, 2.0);
    assert_eq!(lerp(a, b, 0.0), a);
    assert_eq!(lerp(a, b, 1.0), b);
    let mid = lerp(a, b, 0.5);
    assert!((mid - Vec3::new(0.5, 15.0, 0.0)).length() < 1e-6);

    assert!(lerp(Vec3::NAN, b, 0.2).is_nan());
}

#[test]
fn test_average() {
    assert_eq!(average(&[]), None);
    let avg = average(&[Vec3::new(1.0, 0.0, 0.0), Vec3::new(3.0, 2.0, -4.0)]).unwrap();
    assert_eq!(avg, Vec3::new(2.0, 1.0, -2.0));
}

#[test]
fn test_keep_last() {
    let mut v: Vec<i32> = (0..15).collect();
    keep_last(&mut v, 10);
    assert_eq!(v, (5..15).collect::<Vec<_>>());

    let mut short = vec![1, 2, 3];
    keep_last(&mut short, 10);
    assert_eq!(short, vec![1, 2, 3]);
}
