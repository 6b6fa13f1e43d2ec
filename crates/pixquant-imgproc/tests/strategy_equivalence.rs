use rand::{rngs::StdRng, Rng, SeedableRng};

use pixquant_image::{Image, ImageError, ImageSize};
use pixquant_imgproc::lut::Lut;
use pixquant_imgproc::quantize::reduce_div;
use pixquant_imgproc::reduce::{
    color_reduce_contiguous, color_reduce_lut, color_reduce_row_index, ColorReducer,
    ReduceStrategy,
};

const POWERS_OF_TWO: [u8; 8] = [1, 2, 4, 8, 16, 32, 64, 128];

fn random_image<const C: usize>(
    rng: &mut StdRng,
    size: ImageSize,
    stride: usize,
) -> Result<Image<u8, C>, ImageError> {
    let data = (0..size.height * stride).map(|_| rng.random()).collect();
    Image::new_with_stride(size, stride, data)
}

fn check_all_strategies<const C: usize>(
    image: &Image<u8, C>,
    div: u8,
) -> Result<(), ImageError> {
    let mut expected = image.clone();
    color_reduce_row_index(&mut expected, div)?;

    for strategy in ReduceStrategy::ALL {
        let mut out = image.clone();
        ColorReducer::new(strategy, div)?.apply(&mut out)?;
        assert_eq!(out, expected, "strategy {strategy} with div {div}");
    }
    Ok(())
}

#[test]
fn strategies_agree_on_contiguous_rgb() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(7);
    let size = ImageSize {
        width: 33,
        height: 17,
    };
    let image = random_image::<3>(&mut rng, size, size.width * 3)?;
    for div in POWERS_OF_TWO {
        check_all_strategies(&image, div)?;
    }
    Ok(())
}

#[test]
fn strategies_agree_on_padded_rgb() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(11);
    let size = ImageSize {
        width: 21,
        height: 9,
    };
    let image = random_image::<3>(&mut rng, size, size.width * 3 + 5)?;
    for div in POWERS_OF_TWO {
        check_all_strategies(&image, div)?;
    }
    Ok(())
}

#[test]
fn strategies_agree_on_gray() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..8 {
        let size = ImageSize {
            width: rng.random_range(1..40),
            height: rng.random_range(1..40),
        };
        let stride = size.width + rng.random_range(0..4);
        let image = random_image::<1>(&mut rng, size, stride)?;
        check_all_strategies(&image, 64)?;
    }
    Ok(())
}

#[test]
fn padding_is_preserved_by_every_strategy() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(17);
    let size = ImageSize {
        width: 10,
        height: 6,
    };
    let stride = size.width * 3 + 3;
    let image = random_image::<3>(&mut rng, size, stride)?;

    for strategy in ReduceStrategy::ALL {
        let mut out = image.clone();
        ColorReducer::new(strategy, 32)?.apply(&mut out)?;
        assert_eq!(out.stride(), stride, "{strategy}");
        for (row_in, row_out) in image
            .as_slice()
            .chunks_exact(stride)
            .zip(out.as_slice().chunks_exact(stride))
        {
            assert_eq!(row_in[size.width * 3..], row_out[size.width * 3..], "{strategy}");
        }
    }
    Ok(())
}

#[test]
fn contiguous_matches_per_row_traversal() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(19);
    let size = ImageSize {
        width: 64,
        height: 48,
    };
    let image = random_image::<3>(&mut rng, size, size.width * 3)?;
    assert!(image.is_contiguous());

    let mut per_row = image.clone();
    color_reduce_row_index(&mut per_row, 16)?;

    let mut flattened = image.clone();
    color_reduce_contiguous(&mut flattened, 16)?;

    assert_eq!(per_row, flattened);
    Ok(())
}

#[test]
fn lut_matches_direct_kernel() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(23);
    let size = ImageSize {
        width: 16,
        height: 16,
    };
    let image = random_image::<3>(&mut rng, size, size.width * 3)?;

    for div in 1..=255u8 {
        let lut = Lut::color_reduce(div)?;
        for v in 0..=255u8 {
            assert_eq!(lut.get(v), reduce_div(v, div));
        }

        let mut direct = image.clone();
        color_reduce_row_index(&mut direct, div)?;

        let mut remapped = image.clone();
        color_reduce_lut(&mut remapped, &lut);

        assert_eq!(direct, remapped, "div {div}");
    }
    Ok(())
}

#[test]
fn arithmetic_strategies_agree_for_any_divisor() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(29);
    let size = ImageSize {
        width: 12,
        height: 5,
    };
    let image = random_image::<3>(&mut rng, size, size.width * 3 + 1)?;

    for div in [3u8, 5, 10, 48, 100, 200, 255] {
        let mut expected = image.clone();
        color_reduce_row_index(&mut expected, div)?;

        for strategy in ReduceStrategy::ALL
            .into_iter()
            .filter(|s| !s.requires_power_of_two())
        {
            let mut out = image.clone();
            ColorReducer::new(strategy, div)?.apply(&mut out)?;
            assert_eq!(out, expected, "strategy {strategy} with div {div}");
        }
    }
    Ok(())
}
