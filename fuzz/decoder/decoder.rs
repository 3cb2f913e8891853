#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Just no panic
    if data.len() < 2 {
        return;
    }
    let (dims, data) = data.split_at(2);
    // 0 means inferred
    let size = etc2::Size::new(dims[0] as u32, dims[1] as u32);

    if let Ok(image) = etc2::decode(data, size) {
        let size = image.size();
        assert_eq!(image.data().len() as u64, size.pixels() * 3);
    }
});
