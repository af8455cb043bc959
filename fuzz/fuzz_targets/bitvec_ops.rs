#![no_main]
use densebits::{BitVector, Error};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u16, Vec<(u8, u16)>)| {
    let (len_raw, ops) = data;
    let len = (len_raw % 1024) as usize;

    let mut bv = BitVector::new(len);
    let mut model = vec![false; len];

    for (kind, arg) in ops {
        // Allow a few indices past the end to reach the error path.
        let i = arg as usize % (len + 4);
        let in_range = i < len;
        match kind % 5 {
            0 => {
                assert_eq!(bv.set(i).is_ok(), in_range);
                if in_range {
                    model[i] = true;
                }
            }
            1 => {
                assert_eq!(bv.unset(i).is_ok(), in_range);
                if in_range {
                    model[i] = false;
                }
            }
            2 => {
                assert_eq!(bv.toggle(i).is_ok(), in_range);
                if in_range {
                    model[i] = !model[i];
                }
            }
            3 => {
                bv.set_all();
                model.fill(true);
            }
            _ => {
                bv.unset_all();
                model.fill(false);
            }
        }

        let expected = model.iter().filter(|&&v| v).count();
        assert_eq!(bv.count(), expected);

        if in_range {
            assert_eq!(bv.is_set(i).unwrap(), model[i]);
            assert_eq!(
                bv.find_next_set(i).ok(),
                (i..len).find(|&j| model[j])
            );
            assert_eq!(
                bv.find_next_unset(i).ok(),
                (i..len).find(|&j| !model[j])
            );
            let prefix = model[..=i].iter().filter(|&&v| v).count();
            assert_eq!(bv.count_range(0, i).unwrap(), prefix);
            if prefix > 0 {
                let pos = bv.find_nth_set(prefix).unwrap();
                assert!(pos <= i);
                assert!(model[pos]);
            }
        } else {
            assert_eq!(
                bv.is_set(i),
                Err(Error::IndexOutOfRange { index: i, len })
            );
        }
    }
});
